use super::impl_digest;

impl_digest!(md5, Md5, md5::Md5);
