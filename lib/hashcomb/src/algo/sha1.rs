use super::impl_digest;

impl_digest!(sha1, Sha1, sha1::Sha1);
