//! C# emitter.

use super::{qualify, EmitOptions, Emitter, TargetLanguage};
use xamlc_core::{Construct, Literal, TypeName};

const GLOBAL_PREFIX: &str = "global::";

/// Renders expressions as C#.
#[derive(Debug, Clone, Default)]
pub struct CSharpEmitter {
    options: EmitOptions,
}

impl CSharpEmitter {
    /// Create a new C# emitter.
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }
}

impl Emitter for CSharpEmitter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn options(&self) -> &EmitOptions {
        &self.options
    }

    fn type_name(&self, name: &TypeName) -> String {
        qualify(name, GLOBAL_PREFIX, self.options.qualify_global_names)
    }

    fn construct(&self, construct: &Construct) -> String {
        let mut code = format!(
            "new {}({})",
            self.type_name(&construct.type_name),
            self.arguments(&construct.args)
        );

        if !construct.initializers.is_empty() {
            let assignments = construct
                .initializers
                .iter()
                .map(|(property, value)| format!("{} = {}", property, self.emit(value)))
                .collect::<Vec<_>>()
                .join(", ");
            code.push_str(&format!(" {{ {} }}", assignments));
        } else if !construct.items.is_empty() {
            code.push_str(&format!(" {{ {} }}", self.arguments(&construct.items)));
        }

        code
    }

    fn literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Raw(token) => token.clone(),
            Literal::Byte(value) => format!("(byte){}", value),
            Literal::Float(value) => format!("{}F", value),
            Literal::Double(digits) => format!("{}D", digits),
            Literal::Long(value) => format!("{}L", value),
            Literal::Str(value) => self.string_literal(value),
        }
    }

    /// Verbatim string: only `"` needs escaping, by doubling.
    fn string_literal(&self, value: &str) -> String {
        format!("@\"{}\"", value.replace('"', "\"\""))
    }

    fn null(&self) -> &'static str {
        "null"
    }

    fn fallback(&self, target: &TypeName, source: &str) -> String {
        let target = self.type_name(target);
        format!(
            "({}){}.ConvertFromInvariantString(typeof({}), {})",
            target,
            self.type_name(&self.options.fallback_converter),
            target,
            self.string_literal(source)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xamlc_core::Expr;

    fn emit(expr: &Expr) -> String {
        CSharpEmitter::new(EmitOptions::new().with_global_names(false)).emit(expr)
    }

    #[test]
    fn test_construct() {
        let point = Expr::construct("Point".into(), vec![Expr::raw("1"), Expr::raw("2.5")]);
        insta::assert_snapshot!(emit(&point), @"new Point(1, 2.5)");
    }

    #[test]
    fn test_initializers() {
        let spline = Expr::New(
            Construct::new("KeySpline".into())
                .with_initializer(
                    "ControlPoint1",
                    Expr::construct("Point".into(), vec![Expr::raw("0"), Expr::raw("1")]),
                )
                .with_initializer(
                    "ControlPoint2",
                    Expr::construct("Point".into(), vec![Expr::raw("1"), Expr::raw("0")]),
                ),
        );
        insta::assert_snapshot!(
            emit(&spline),
            @"new KeySpline() { ControlPoint1 = new Point(0, 1), ControlPoint2 = new Point(1, 0) }"
        );
    }

    #[test]
    fn test_collection_items() {
        let doubles = Expr::New(
            Construct::new("DoubleCollection".into()).with_items(vec![Expr::raw("1"), Expr::raw("2")]),
        );
        insta::assert_snapshot!(emit(&doubles), @"new DoubleCollection() { 1, 2 }");

        let empty = Expr::New(Construct::new("DoubleCollection".into()));
        insta::assert_snapshot!(emit(&empty), @"new DoubleCollection()");
    }

    #[test]
    fn test_literals() {
        let color = Expr::invoke(
            "Color".into(),
            "FromArgb",
            vec![
                Expr::Literal(Literal::Byte(255)),
                Expr::Literal(Literal::Byte(0)),
                Expr::Literal(Literal::Byte(128)),
                Expr::Literal(Literal::Byte(64)),
            ],
        );
        insta::assert_snapshot!(
            emit(&color),
            @"Color.FromArgb((byte)255, (byte)0, (byte)128, (byte)64)"
        );

        assert_eq!(emit(&Expr::Literal(Literal::Float(0.5))), "0.5F");
        assert_eq!(emit(&Expr::Literal(Literal::Float(1.0))), "1F");
        assert_eq!(emit(&Expr::Literal(Literal::Double("1".into()))), "1D");
        assert_eq!(emit(&Expr::Literal(Literal::Long(10_000_000))), "10000000L");
        assert_eq!(emit(&Expr::Null), "null");
    }

    #[test]
    fn test_string_escaping() {
        insta::assert_snapshot!(emit(&Expr::string(r#"a"b\c"#)), @r#"@"a""b\c""#);
    }

    #[test]
    fn test_fallback() {
        let fallback = Expr::fallback("Geometry".into(), "M 0,0 L 1,1");
        insta::assert_snapshot!(
            emit(&fallback),
            @r#"(Geometry)DotNetForHtml5.Core.TypeFromStringConverters.ConvertFromInvariantString(typeof(Geometry), @"M 0,0 L 1,1")"#
        );
    }

    #[test]
    fn test_default_qualifies_names() {
        let expr = Expr::construct("System.Windows.Point".into(), vec![Expr::raw("1"), Expr::raw("2")]);
        insta::assert_snapshot!(
            CSharpEmitter::default().emit(&expr),
            @"new global::System.Windows.Point(1, 2)"
        );
    }

    #[test]
    fn test_global_names() {
        let emitter = CSharpEmitter::new(EmitOptions::new().with_global_names(true));
        let expr = Expr::member("System.Windows.Media.Colors".into(), "Red");
        insta::assert_snapshot!(emitter.emit(&expr), @"global::System.Windows.Media.Colors.Red");

        let prefixed = Expr::member("global::System.Windows.Media.Colors".into(), "Red");
        assert_eq!(emitter.emit(&prefixed), "global::System.Windows.Media.Colors.Red");
    }
}
