use super::impl_digest;

impl_digest!(md4, Md4, md4::Md4);
