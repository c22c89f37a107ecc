pub(crate) mod sequence;
pub(crate) mod shuffle;
pub(crate) mod stream;
