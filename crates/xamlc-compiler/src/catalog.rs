//! The fixed set of core types with dedicated markup grammars.

use xamlc_convert::{animation, color, geometry, layout, media, text, ConvertFn};

/// One statically known converter.
pub struct CatalogEntry {
    /// Lower-cased fully-qualified type name.
    pub key: &'static str,
    /// Type constructed when the caller does not override it.
    pub destination: &'static str,
    /// Default companion type names, by position.
    pub companions: &'static [&'static str],
    pub convert: ConvertFn,
}

const fn entry(
    key: &'static str,
    destination: &'static str,
    companions: &'static [&'static str],
    convert: ConvertFn,
) -> CatalogEntry {
    CatalogEntry {
        key,
        destination,
        companions,
        convert,
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    entry(
        "system.windows.input.cursor",
        "System.Windows.Input.Cursor",
        &["System.Windows.Input.Cursors"],
        media::convert_to_cursor,
    ),
    entry(
        "system.windows.media.animation.keytime",
        "System.Windows.Media.Animation.KeyTime",
        &[],
        animation::convert_to_key_time,
    ),
    entry(
        "system.windows.media.animation.repeatbehavior",
        "System.Windows.Media.Animation.RepeatBehavior",
        &[],
        animation::convert_to_repeat_behavior,
    ),
    entry(
        "system.windows.media.animation.keyspline",
        "System.Windows.Media.Animation.KeySpline",
        &["System.Windows.Point"],
        animation::convert_to_key_spline,
    ),
    entry(
        "system.windows.media.brush",
        "System.Windows.Media.SolidColorBrush",
        &["System.Windows.Media.Color"],
        color::convert_to_brush,
    ),
    entry(
        "system.windows.media.solidcolorbrush",
        "System.Windows.Media.SolidColorBrush",
        &["System.Windows.Media.Color"],
        color::convert_to_brush,
    ),
    entry(
        "system.windows.media.color",
        "System.Windows.Media.Color",
        &[],
        color::convert_to_color,
    ),
    entry(
        "system.windows.media.doublecollection",
        "System.Windows.Media.DoubleCollection",
        &[],
        geometry::convert_to_double_collection,
    ),
    entry(
        "system.windows.media.fontfamily",
        "System.Windows.Media.FontFamily",
        &[],
        text::convert_to_font_family,
    ),
    entry(
        "system.windows.media.geometry",
        "System.Windows.Media.Geometry",
        &[],
        media::convert_to_geometry,
    ),
    entry(
        "system.windows.media.pathgeometry",
        "System.Windows.Media.PathGeometry",
        &[],
        media::convert_to_geometry,
    ),
    entry(
        "system.windows.media.matrix",
        "System.Windows.Media.Matrix",
        &[],
        geometry::convert_to_matrix,
    ),
    entry(
        "system.windows.media.pointcollection",
        "System.Windows.Media.PointCollection",
        &["System.Windows.Point"],
        geometry::convert_to_point_collection,
    ),
    entry(
        "system.windows.media.transform",
        "System.Windows.Media.MatrixTransform",
        &["System.Windows.Media.Matrix"],
        geometry::convert_to_transform,
    ),
    entry(
        "system.windows.media.matrixtransform",
        "System.Windows.Media.MatrixTransform",
        &["System.Windows.Media.Matrix"],
        geometry::convert_to_transform,
    ),
    entry(
        "system.windows.media.cachemode",
        "System.Windows.Media.CacheMode",
        &["System.Windows.Media.BitmapCache"],
        media::convert_to_cache_mode,
    ),
    entry(
        "system.windows.cornerradius",
        "System.Windows.CornerRadius",
        &[],
        layout::convert_to_corner_radius,
    ),
    entry(
        "system.windows.duration",
        "System.Windows.Duration",
        &[],
        animation::convert_to_duration,
    ),
    entry(
        "system.windows.fontweight",
        "System.Windows.FontWeight",
        &["System.Windows.FontWeights"],
        text::convert_to_font_weight,
    ),
    entry(
        "system.windows.gridlength",
        "System.Windows.GridLength",
        &["System.Windows.GridUnitType"],
        layout::convert_to_grid_length,
    ),
    entry(
        "system.windows.point",
        "System.Windows.Point",
        &[],
        geometry::convert_to_point,
    ),
    entry(
        "system.windows.propertypath",
        "System.Windows.PropertyPath",
        &[],
        media::convert_to_property_path,
    ),
    entry(
        "system.windows.rect",
        "System.Windows.Rect",
        &[],
        geometry::convert_to_rect,
    ),
    entry(
        "system.windows.size",
        "System.Windows.Size",
        &[],
        geometry::convert_to_size,
    ),
    entry(
        "system.windows.thickness",
        "System.Windows.Thickness",
        &[],
        layout::convert_to_thickness,
    ),
    entry(
        "system.windows.fontstretch",
        "System.Windows.FontStretch",
        &[],
        text::convert_to_font_stretch,
    ),
    entry(
        "system.windows.fontstyle",
        "System.Windows.FontStyle",
        &["System.Windows.FontStyles"],
        text::convert_to_font_style,
    ),
    entry(
        "system.windows.textdecorationcollection",
        "System.Windows.TextDecorationCollection",
        &["System.Windows.TextDecorations"],
        text::convert_to_text_decorations,
    ),
    entry(
        "system.windows.media.imagesource",
        "System.Windows.Media.ImageSource",
        &["System.Windows.Media.Imaging.BitmapImage"],
        media::convert_to_image_source,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in CATALOG {
            assert_eq!(entry.key, entry.key.to_lowercase());
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
        }
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG.len(), 29);
    }

    #[test]
    fn test_every_default_target_is_complete() {
        // A blank value may fail, but never for want of a companion type.
        for entry in CATALOG {
            let mut target = xamlc_core::ConversionTarget::new(entry.destination);
            for companion in entry.companions {
                target = target.with_companion(*companion);
            }
            if let Err(failure) = (entry.convert)("", &target) {
                assert!(
                    !matches!(
                        failure.cause,
                        Some(xamlc_core::FailureCause::MissingCompanionType(_))
                    ),
                    "{} needs more companions",
                    entry.key
                );
            }
        }
    }
}
