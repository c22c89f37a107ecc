pub(crate) mod placer;
