use super::impl_digest;

impl_digest!(md2, Md2, md2::Md2);
