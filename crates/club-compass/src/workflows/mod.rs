pub mod bookmarks;
pub mod catalog;
pub mod identity;
pub mod qna;
pub mod quiz;
pub mod recommendation;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;
