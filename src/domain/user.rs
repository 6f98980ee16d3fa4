//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`User::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyFirstName,
    EmptyLastName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyFirstName => write!(f, "first name must not be blank"),
            Self::EmptyLastName => write!(f, "last name must not be blank"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
///
/// Assigned by the storage adapter at insert time and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        let parsed = Uuid::try_parse(id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Construct a [`UserId`] from an already-parsed UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validation error raised by [`PersonName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankNameError;

impl fmt::Display for BlankNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name must not be blank")
    }
}

impl std::error::Error for BlankNameError {}

/// A user's given or family name.
///
/// Input is stored as supplied but must contain at least one
/// non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, BlankNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BlankNameError);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = BlankNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A stored user record.
///
/// ## Invariants
/// - `id` is a valid UUID string.
/// - `first_name` and `last_name` are non-blank once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    first_name: PersonName,
    last_name: PersonName,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }

    /// Fallible constructor enforcing identifier and name invariants.
    ///
    /// Prefer [`User::new`] when components are already validated.
    pub fn try_from_parts(
        id: impl AsRef<str>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        let first_name =
            PersonName::new(first_name).map_err(|_| UserValidationError::EmptyFirstName)?;
        let last_name =
            PersonName::new(last_name).map_err(|_| UserValidationError::EmptyLastName)?;

        Ok(Self::new(id, first_name, last_name))
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    first_name: String,
    last_name: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
        } = value;
        Self {
            id: id.to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.first_name, value.last_name)
    }
}

/// A user awaiting its store-assigned identifier.
///
/// Carries validated names only; the storage adapter assigns the UUID when
/// the record is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    first_name: PersonName,
    last_name: PersonName,
}

impl NewUser {
    /// Build a [`NewUser`] from validated names.
    pub fn new(first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    /// Given name.
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Promote to a stored [`User`] under the assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[rstest]
    fn try_from_parts_accepts_valid_input() {
        let user = User::try_from_parts(ID, "Ada", "Lovelace").expect("valid user");
        assert_eq!(user.id().to_string(), ID);
        assert_eq!(user.first_name().as_ref(), "Ada");
        assert_eq!(user.last_name().as_ref(), "Lovelace");
    }

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    fn invalid_ids_are_rejected(#[case] id: &str, #[case] expected: UserValidationError) {
        let err = User::try_from_parts(id, "Ada", "Lovelace").expect_err("invalid id");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("", "Lovelace", UserValidationError::EmptyFirstName)]
    #[case("   ", "Lovelace", UserValidationError::EmptyFirstName)]
    #[case("Ada", "", UserValidationError::EmptyLastName)]
    #[case("Ada", "\t ", UserValidationError::EmptyLastName)]
    fn blank_names_are_rejected(
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] expected: UserValidationError,
    ) {
        let err = User::try_from_parts(ID, first_name, last_name).expect_err("blank name");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn serde_uses_camel_case_field_names() {
        let user = User::try_from_parts(ID, "Ada", "Lovelace").expect("valid user");
        let value = serde_json::to_value(&user).expect("serialises");
        assert_eq!(
            value,
            json!({ "id": ID, "firstName": "Ada", "lastName": "Lovelace" })
        );
    }

    #[rstest]
    fn deserialising_blank_names_fails() {
        let result: Result<User, _> =
            serde_json::from_value(json!({ "id": ID, "firstName": " ", "lastName": "Lovelace" }));
        assert!(result.is_err());
    }

    #[rstest]
    fn random_ids_are_unique() {
        assert_ne!(UserId::random(), UserId::random());
    }

    #[rstest]
    fn new_user_promotes_to_user_under_assigned_id() {
        let draft = NewUser::new(
            PersonName::new("Ada").expect("valid name"),
            PersonName::new("Lovelace").expect("valid name"),
        );
        let id = UserId::random();

        let user = draft.into_user(id);
        assert_eq!(user.id(), &id);
        assert_eq!(user.first_name().as_ref(), "Ada");
    }
}
