pub mod judge_html;
pub(crate) mod judge_utils;
