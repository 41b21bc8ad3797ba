//! User - The operator whose KPI the engine keeps
//!
//! User is an Entity. Score, wallet, training queue and AI task count
//! are only ever changed by the reaction engine, which is why their
//! mutators are crate-private.

/// Unique identifier for a User
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access level of an operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User - One record per operator
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier (Entity identity)
    id: UserId,
    /// Display name
    name: String,
    role: UserRole,
    /// The core KPI score
    score: i64,
    /// Commission balance
    wallet: i64,
    /// Training modules assigned by coaching, in assignment order, no duplicates
    pending_training: Vec<String>,
    ai_tasks_completed: u32,
}

impl User {
    /// Create a new User with zero score and an empty wallet
    pub fn new(id: UserId, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            score: 0,
            wallet: 0,
            pending_training: Vec::new(),
            ai_tasks_completed: 0,
        }
    }

    /// Builder: opening score for the session
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Builder: opening wallet balance for the session
    pub fn with_wallet(mut self, wallet: i64) -> Self {
        self.wallet = wallet;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn wallet(&self) -> i64 {
        self.wallet
    }

    pub fn pending_training(&self) -> &[String] {
        &self.pending_training
    }

    pub fn ai_tasks_completed(&self) -> u32 {
        self.ai_tasks_completed
    }

    pub fn has_pending_training(&self, module: &str) -> bool {
        self.pending_training.iter().any(|t| t == module)
    }

    // ========== Engine-only mutations ==========

    pub(crate) fn adjust_score(&mut self, delta: i64) {
        self.score += delta;
    }

    pub(crate) fn credit_wallet(&mut self, amount: i64) {
        self.wallet += amount;
    }

    /// Queue a training module. Returns false if it was already pending.
    pub(crate) fn enqueue_training(&mut self, module: &str) -> bool {
        if self.has_pending_training(module) {
            return false;
        }
        self.pending_training.push(module.to_string());
        true
    }

    /// Drop a training module. Returns false if it was not pending.
    pub(crate) fn dequeue_training(&mut self, module: &str) -> bool {
        let before = self.pending_training.len();
        self.pending_training.retain(|t| t != module);
        self.pending_training.len() != before
    }

    pub(crate) fn record_ai_task(&mut self) {
        self.ai_tasks_completed += 1;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> User {
        User::new(UserId::new("u1"), "Alex Sales", UserRole::Staff)
            .with_score(100)
            .with_wallet(500)
    }

    #[test]
    fn test_user_creation() {
        let user = alex();
        assert_eq!(user.id().as_str(), "u1");
        assert_eq!(user.role(), UserRole::Staff);
        assert_eq!(user.score(), 100);
        assert_eq!(user.wallet(), 500);
        assert!(user.pending_training().is_empty());
        assert_eq!(user.ai_tasks_completed(), 0);
    }

    #[test]
    fn test_training_queue_rejects_duplicates() {
        let mut user = alex();
        assert!(user.enqueue_training("Writing Better Emails"));
        assert!(!user.enqueue_training("Writing Better Emails"));
        assert_eq!(user.pending_training(), ["Writing Better Emails"]);
    }

    #[test]
    fn test_dequeue_missing_module() {
        let mut user = alex();
        user.enqueue_training("Advanced Telesales Skills");
        assert!(!user.dequeue_training("Writing Better Emails"));
        assert!(user.dequeue_training("Advanced Telesales Skills"));
        assert!(user.pending_training().is_empty());
    }
}
