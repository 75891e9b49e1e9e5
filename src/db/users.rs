use super::db::{Db, Param};
use super::schema;
use anyhow::Result;

const INSERT_USER: &str = "INSERT INTO usuarios (nombre, email, password) VALUES (?1, ?2, ?3)";
const SELECT_CREDENTIALS: &str = "SELECT id, nombre, password FROM usuarios WHERE email = ?1 OR nombre = ?2";
const EXISTS_BY_NAME: &str = "SELECT 1 FROM usuarios WHERE nombre = ?1 LIMIT 1";
const EXISTS_BY_EMAIL: &str = "SELECT 1 FROM usuarios WHERE email = ?1 LIMIT 1";

/// The only user columns a uniqueness probe may target. Each variant maps
/// to a complete fixed statement, so no caller-supplied text ever reaches
/// the SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    fn exists_statement(&self) -> &'static str {
        match self {
            UserField::Name => EXISTS_BY_NAME,
            UserField::Email => EXISTS_BY_EMAIL,
        }
    }
}

/// Credential comparison seam. Stored passwords are plaintext today, which
/// is a known open issue; a salted-hash scheme only needs another
/// implementation of this trait, repository call sites stay untouched.
pub trait CredentialVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}

/// Registration result as a named business outcome, never a raw constraint
/// violation from the storage engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    NameTaken,
    EmailTaken,
    MissingField,
}

/// Authentication result. `Rejected` covers both an unknown identifier and
/// a wrong password; callers cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated { user_id: i64, name: String },
    Rejected,
}

pub struct Users {
    db: Db,
    verifier: Box<dyn CredentialVerifier>,
}

impl Users {
    pub fn new() -> Result<Self> {
        Self::with_verifier(Box::new(PlaintextVerifier))
    }

    pub fn with_verifier(verifier: Box<dyn CredentialVerifier>) -> Result<Self> {
        let db = Db::new()?;
        schema::ensure_schema(&db)?;
        Ok(Users { db, verifier })
    }

    /// Probes whether a user already holds `value` in the given field.
    pub fn exists_by_field(&self, field: UserField, value: &str) -> Result<bool> {
        let hits = self
            .db
            .query(field.exists_statement(), &[Param::Text(value.to_string())], |row| row.get::<_, i64>(0))?;
        Ok(!hits.is_empty())
    }

    /// Registers a new user after re-checking both uniqueness probes, so a
    /// duplicate surfaces as an outcome instead of a constraint fault.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<RegisterOutcome> {
        let name = name.trim();
        let email = email.trim();
        let password = password.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Ok(RegisterOutcome::MissingField);
        }
        if self.exists_by_field(UserField::Email, email)? {
            return Ok(RegisterOutcome::EmailTaken);
        }
        if self.exists_by_field(UserField::Name, name)? {
            return Ok(RegisterOutcome::NameTaken);
        }

        self.db.execute(
            INSERT_USER,
            &[Param::Text(name.to_string()), Param::Text(email.to_string()), Param::Text(password.to_string())],
        )?;

        Ok(RegisterOutcome::Created)
    }

    /// Looks up a user by name or email and verifies the supplied password.
    pub fn authenticate(&self, identifier: &str, password: &str) -> Result<AuthOutcome> {
        let identifier = identifier.trim();
        let candidates = self.db.query(
            SELECT_CREDENTIALS,
            &[Param::Text(identifier.to_string()), Param::Text(identifier.to_string())],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)),
        )?;

        for (user_id, name, stored) in candidates {
            if self.verifier.verify(password, &stored) {
                return Ok(AuthOutcome::Authenticated { user_id, name });
            }
        }

        Ok(AuthOutcome::Rejected)
    }
}
