/// Macro used for test assertions with fuzzy equality.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the path construction macro. Used for extracting macro
/// repetition count for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [Path](crate::path::Path) from a list of `(x, y)` tuples.
///
/// All vertexes get a zero tag; use [PathVertex::with_tag](crate::path::PathVertex::with_tag)
/// to build tagged paths.
///
/// # Examples
///
/// ```
/// # use contour_offset::path;
/// # use contour_offset::path::*;
/// let p = path![(0.0, 1.0), (2.0, 3.0)];
/// assert_eq!(p.vertex_count(), 2);
/// assert_eq!(p[0], PathVertex::new(0.0, 1.0));
/// assert_eq!(p[1], PathVertex::new(2.0, 3.0));
/// ```
#[macro_export]
macro_rules! path {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut p = $crate::path::Path::with_capacity(size);
            $(
                p.add($x.0, $x.1);
            )*
            p
        }
    };
}
