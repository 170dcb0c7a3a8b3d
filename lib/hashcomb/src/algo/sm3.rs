use super::impl_digest;

impl_digest!(sm3, Sm3, sm3::Sm3);
