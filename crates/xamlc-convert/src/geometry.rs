//! Points, sizes, rectangles, matrices and the numeric collections.

use xamlc_core::{Construct, ConversionTarget, ConvertResult, Expr, FailureCause};
use xamlc_parser::split_numeric_list;

use crate::{exact_tokens, point, raw_args};

/// `new Point(x, y)`.
pub fn convert_to_point(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let tokens = exact_tokens(source, target, 2, "2")?;
    Ok(Expr::construct(target.destination().clone(), raw_args(&tokens)))
}

/// `new Size(width, height)`.
pub fn convert_to_size(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let tokens = exact_tokens(source, target, 2, "2")?;
    Ok(Expr::construct(target.destination().clone(), raw_args(&tokens)))
}

/// `new Rect(x, y, width, height)`.
pub fn convert_to_rect(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let tokens = exact_tokens(source, target, 4, "4")?;
    Ok(Expr::construct(target.destination().clone(), raw_args(&tokens)))
}

/// `Matrix.Identity` or `new Matrix(m11, m12, m21, m22, offsetX, offsetY)`.
pub fn convert_to_matrix(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    if source == "Identity" {
        return Ok(Expr::member(target.destination().clone(), "Identity"));
    }
    let tokens = exact_tokens(source, target, 6, "6")?;
    Ok(Expr::construct(target.destination().clone(), raw_args(&tokens)))
}

/// `new MatrixTransform(matrix)`. Companion 0 is the matrix type.
pub fn convert_to_transform(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let matrix_type = target.require_companion(source, 0)?.clone();
    let matrix = convert_to_matrix(source, &ConversionTarget::new(matrix_type))
        .map_err(|failure| failure.retarget(target.destination().as_str()))?;
    Ok(Expr::construct(target.destination().clone(), vec![matrix]))
}

/// Pairs of numbers as a collection of points. Companion 0 is the point type.
pub fn convert_to_point_collection(
    source: &str,
    target: &ConversionTarget,
) -> ConvertResult<Expr> {
    let tokens = split_numeric_list(source);
    if tokens.len() % 2 != 0 {
        return Err(target.fail(
            source,
            FailureCause::TokenCount {
                expected: "an even number of",
                found: tokens.len(),
            },
        ));
    }
    if tokens.is_empty() {
        return Ok(Expr::new_default(target.destination().clone()));
    }

    let point_type = target.require_companion(source, 0)?;
    let items = tokens
        .chunks(2)
        .map(|pair| point(point_type, pair[0], pair[1]))
        .collect();
    Ok(Expr::New(
        Construct::new(target.destination().clone()).with_items(items),
    ))
}

/// Any number of doubles as a collection.
pub fn convert_to_double_collection(
    source: &str,
    target: &ConversionTarget,
) -> ConvertResult<Expr> {
    let tokens = split_numeric_list(source);
    Ok(Expr::New(
        Construct::new(target.destination().clone()).with_items(raw_args(&tokens)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use xamlc_core::Literal;

    fn raw_values(expr: &Expr) -> Vec<String> {
        expr.as_construct()
            .unwrap()
            .args
            .iter()
            .map(|arg| match arg {
                Expr::Literal(Literal::Raw(s)) => s.clone(),
                other => panic!("expected raw literal, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_point_size_rect() {
        let point = convert_to_point("10, 20", &ConversionTarget::new("Point")).unwrap();
        assert_eq!(raw_values(&point), vec!["10", "20"]);

        let size = convert_to_size("3 4", &ConversionTarget::new("Size")).unwrap();
        assert_eq!(raw_values(&size), vec!["3", "4"]);

        let rect = convert_to_rect("0,0,100,50", &ConversionTarget::new("Rect")).unwrap();
        assert_eq!(raw_values(&rect), vec!["0", "0", "100", "50"]);
    }

    #[test]
    fn test_wrong_token_counts() {
        let err = convert_to_point("1,2,3", &ConversionTarget::new("Point")).unwrap_err();
        assert_eq!(err.value, "1,2,3");
        assert_eq!(
            err.cause,
            Some(FailureCause::TokenCount {
                expected: "2",
                found: 3
            })
        );
        assert!(convert_to_rect("1 2 3", &ConversionTarget::new("Rect")).is_err());
        assert!(convert_to_size("", &ConversionTarget::new("Size")).is_err());
    }

    #[test]
    fn test_matrix() {
        let target = ConversionTarget::new("System.Windows.Media.Matrix");
        assert_eq!(
            convert_to_matrix("Identity", &target).unwrap(),
            Expr::member("System.Windows.Media.Matrix".into(), "Identity")
        );
        let m = convert_to_matrix("1,0,0,1,10,20", &target).unwrap();
        assert_eq!(raw_values(&m), vec!["1", "0", "0", "1", "10", "20"]);

        // Only the exact spelling is the identity keyword.
        assert!(convert_to_matrix("identity", &target).is_err());
        assert!(convert_to_matrix(" Identity", &target).is_err());
        assert!(convert_to_matrix("1,0,0,1", &target).is_err());
    }

    #[test]
    fn test_transform_wraps_matrix() {
        let target = ConversionTarget::new("System.Windows.Media.MatrixTransform")
            .with_companion("System.Windows.Media.Matrix");
        let expr = convert_to_transform("Identity", &target).unwrap();
        let construct = expr.as_construct().unwrap();
        assert_eq!(construct.type_name.short_name(), "MatrixTransform");
        assert!(matches!(construct.args[0], Expr::Member { .. }));

        let err = convert_to_transform("1 2", &target).unwrap_err();
        assert_eq!(err.type_name, "System.Windows.Media.MatrixTransform");
    }

    #[test]
    fn test_point_collection() {
        let target = ConversionTarget::new("PointCollection").with_companion("Point");
        let expr = convert_to_point_collection("0,0 10,10 20,0", &target).unwrap();
        let items = &expr.as_construct().unwrap().items;
        assert_eq!(items.len(), 3);
        assert_eq!(raw_values(&items[1]), vec!["10", "10"]);
    }

    #[test]
    fn test_point_collection_edges() {
        let target = ConversionTarget::new("PointCollection").with_companion("Point");
        let err = convert_to_point_collection("1,2,3", &target).unwrap_err();
        assert_eq!(
            err.cause,
            Some(FailureCause::TokenCount {
                expected: "an even number of",
                found: 3
            })
        );

        let empty = convert_to_point_collection("", &target).unwrap();
        assert_eq!(empty, Expr::new_default("PointCollection".into()));
    }

    #[test]
    fn test_double_collection() {
        let target = ConversionTarget::new("DoubleCollection");
        let expr = convert_to_double_collection("1 2,3.5", &target).unwrap();
        assert_eq!(
            expr.as_construct().unwrap().items,
            vec![Expr::raw("1"), Expr::raw("2"), Expr::raw("3.5")]
        );
        let empty = convert_to_double_collection("", &target).unwrap();
        assert!(empty.as_construct().unwrap().items.is_empty());
    }

    proptest! {
        #[test]
        fn prop_point_collection_pairs_in_order(coords in prop::collection::vec(-1000i32..1000, 0..12)) {
            let source = coords
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let target = ConversionTarget::new("PointCollection").with_companion("Point");
            let result = convert_to_point_collection(&source, &target);

            if coords.len() % 2 == 1 {
                prop_assert!(result.is_err());
            } else {
                let expr = result.unwrap();
                let items = &expr.as_construct().unwrap().items;
                prop_assert_eq!(items.len(), coords.len() / 2);
                for (item, pair) in items.iter().zip(coords.chunks(2)) {
                    prop_assert_eq!(raw_values(item), vec![pair[0].to_string(), pair[1].to_string()]);
                }
            }
        }
    }
}
