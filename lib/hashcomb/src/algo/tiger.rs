use super::impl_digest;

impl_digest!(tiger, Tiger, tiger::Tiger);
impl_digest!(tiger2, Tiger2, tiger::Tiger2);
