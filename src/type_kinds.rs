//! JDK type categories used when deciding how to wrap request bodies

use crate::types::{is_assignable_to, TypeRef};

pub const STRING_TYPE: &str = "java.lang.String";
pub const INPUT_STREAM_TYPE: &str = "java.io.InputStream";
pub const FILE_TYPE: &str = "java.io.File";
pub const URI_TYPE: &str = "java.net.URI";

pub fn is_string_type<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_to(STRING_TYPE, ty)
}

/// True for `java.io.InputStream` and its subclasses
pub fn is_input_stream_type<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_to(INPUT_STREAM_TYPE, ty)
}

pub fn is_file_type<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_to(FILE_TYPE, ty)
}

pub fn is_uri_type<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_to(URI_TYPE, ty)
}
