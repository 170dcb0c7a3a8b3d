use super::impl_digest;

impl_digest!(fsb160, Fsb160, fsb::Fsb160);
impl_digest!(fsb224, Fsb224, fsb::Fsb224);
impl_digest!(fsb256, Fsb256, fsb::Fsb256);
impl_digest!(fsb384, Fsb384, fsb::Fsb384);
impl_digest!(fsb512, Fsb512, fsb::Fsb512);
