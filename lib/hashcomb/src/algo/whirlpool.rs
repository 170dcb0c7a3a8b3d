use super::impl_digest;

impl_digest!(whirlpool, Whirlpool, whirlpool::Whirlpool);
