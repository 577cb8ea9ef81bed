//! Type names referenced by generated code that are never supplied per call.

pub const URI: &str = "System.Uri";
pub const URI_KIND: &str = "System.UriKind";
pub const TIME_SPAN: &str = "System.TimeSpan";

/// Runtime type exposing `ConvertFromInvariantString(Type, string)`.
pub const TYPE_FROM_STRING_CONVERTERS: &str = "DotNetForHtml5.Core.TypeFromStringConverters";
