use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::AppResult;

/// 票据图片存储：只做字节透传，不解析图片内容。
/// 文件名使用 uuid 重新生成，仅保留原始扩展名。
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
    public_base: String,
}

impl ImageStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: PathBuf::from(&config.upload_dir),
            public_base: config.public_path.trim_end_matches('/').to_string(),
        }
    }

    /// 保存图片字节并返回对外访问路径 (如 /uploads/<uuid>.jpg)
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<String> {
        tokio::fs::create_dir_all(&self.root).await?;

        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or("bin");
        let file_name = format!("{}.{}", Uuid::new_v4(), ext.to_ascii_lowercase());

        tokio::fs::write(self.root.join(&file_name), bytes).await?;

        Ok(format!("{}/{}", self.public_base, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    fn temp_store() -> (ImageStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("tambola-test-{}", Uuid::new_v4()));
        let store = ImageStore::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().into_owned(),
            public_path: "/uploads".to_string(),
        });
        (store, dir)
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_public_path() {
        let (store, dir) = temp_store();
        let url = store.save("ticket.JPG", b"fake image bytes").await.unwrap();

        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".jpg"));

        let file_name = url.rsplit('/').next().unwrap();
        let on_disk = tokio::fs::read(dir.join(file_name)).await.unwrap();
        assert_eq!(on_disk, b"fake image bytes");

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_or_odd_extension_falls_back_to_bin() {
        let (store, dir) = temp_store();

        let url = store.save("noextension", b"data").await.unwrap();
        assert!(url.ends_with(".bin"));

        let url = store.save("weird.ext%00", b"data").await.unwrap();
        assert!(url.ends_with(".bin"));

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }
}
