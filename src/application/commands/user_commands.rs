//! User Commands

/// 注册用户命令
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// 更新用户命令
///
/// `principal_id` 来自请求上下文，`id` 来自请求体，两者必须一致
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub principal_id: i64,
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
