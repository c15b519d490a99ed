// File URL builders
//
// No network I/O here: the browser hands these URLs straight to a download
// anchor or an embedded viewer, so the client only assembles them. Every
// caller-supplied segment is percent-encoded; the builders are pure
// functions of their inputs and the configured base URL.

use urlencoding::encode;

use crate::ApiClient;

impl ApiClient {
    /// `{base}/api/files/download/upload/{fileName}`
    pub fn upload_download_url(&self, file_name: &str) -> String {
        format!(
            "{}/api/files/download/upload/{}",
            self.config.base_url,
            encode(file_name)
        )
    }

    /// `{base}/api/files/preview/upload/{fileName}`, used for inline PDF preview
    pub fn upload_preview_url(&self, file_name: &str) -> String {
        format!(
            "{}/api/files/preview/upload/{}",
            self.config.base_url,
            encode(file_name)
        )
    }

    /// `{base}/api/files/download/result/{taskName}/result/{fileName}`
    pub fn result_download_url(&self, task_name: &str, file_name: &str) -> String {
        format!(
            "{}/api/files/download/result/{}/result/{}",
            self.config.base_url,
            encode(task_name),
            encode(file_name)
        )
    }

    /// `{base}/api/files/download/excel/{taskId}?fileName={fileName}`
    pub fn excel_download_url(&self, task_id: i64, file_name: &str) -> String {
        format!(
            "{}/api/files/download/excel/{}?fileName={}",
            self.config.base_url,
            task_id,
            encode(file_name)
        )
    }

    /// `{base}/api/files/download/json/{taskName}/{fileName}`
    pub fn json_download_url(&self, task_name: &str, file_name: &str) -> String {
        format!(
            "{}/api/files/download/json/{}/{}",
            self.config.base_url,
            encode(task_name),
            encode(file_name)
        )
    }
}
