//! User Queries

/// 按 ID 获取用户
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: i64,
}

/// 按邮箱获取用户（附带未使用的兑换券）
#[derive(Debug, Clone)]
pub struct GetUserByEmail {
    pub email: String,
}

/// 列出所有用户
#[derive(Debug, Clone)]
pub struct ListUsers;
