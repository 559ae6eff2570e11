//! 运行时配置

/// 默认后端地址，构建时可通过环境变量覆盖
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// API 基地址
///
/// 优先读取构建时的 `API_BASE_URL` 环境变量 (trunk 构建时注入)，
/// 末尾的 '/' 会被裁掉。
pub fn api_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
