pub(crate) mod mirror;
