use crate::domain::model::{ConvertStats, Separator};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> PathBuf;
    fn separator(&self) -> Separator;
    fn pretty(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn run(&self) -> Result<ConvertStats>;
}
