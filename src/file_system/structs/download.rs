use crate::file_system::enums::download_content::DownloadContent;

#[derive(Debug)]
pub struct Download {
    pub total_bytes: u64,
    pub content: DownloadContent,
}
