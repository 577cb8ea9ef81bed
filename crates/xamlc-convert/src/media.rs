//! Images, cursors, cache modes, geometry and property paths.

use xamlc_core::names;
use xamlc_core::{ConversionTarget, ConvertResult, Expr, TypeName};

/// `new BitmapImage(new Uri(source, UriKind.Absolute|Relative))`.
/// Companion 0 is the bitmap image type.
pub fn convert_to_image_source(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let bitmap = target.require_companion(source, 0)?.clone();
    let kind = if source.contains(":/") {
        "Absolute"
    } else {
        "Relative"
    };

    let uri = Expr::construct(
        TypeName::from(names::URI),
        vec![
            Expr::string(source),
            Expr::member(TypeName::from(names::URI_KIND), kind),
        ],
    );
    Ok(Expr::construct(bitmap, vec![uri]))
}

/// `Cursors.Name`. Companion 0 is the `Cursors` owner; names are trimmed but not checked.
pub fn convert_to_cursor(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let owner = target.require_companion(source, 0)?.clone();
    Ok(Expr::member(owner, source.trim()))
}

/// `new BitmapCache()`. Companion 0 is the bitmap cache type.
pub fn convert_to_cache_mode(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    if !source.trim().eq_ignore_ascii_case("BitmapCache") {
        return Err(target.reject(source));
    }
    let cache = target.require_companion(source, 0)?.clone();
    Ok(Expr::new_default(cache))
}

/// Path markup is left to the runtime converter.
pub fn convert_to_geometry(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    Ok(Expr::fallback(target.destination().clone(), source))
}

/// `new PropertyPath("path")`, verbatim.
pub fn convert_to_property_path(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    Ok(Expr::construct(
        target.destination().clone(),
        vec![Expr::string(source)],
    ))
}
