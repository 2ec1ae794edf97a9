//! Resident records and their stable identity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// Opaque identity of a resident.
///
/// Generated once when the resident is created and never reassigned.
/// It is the final tiebreak when two residents share a name and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResidentId(Uuid);

impl ResidentId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A medical resident being scheduled.
///
/// Fields are read-only after construction; the scheduler keeps all of its
/// per-run bookkeeping outside the record.
///
/// # Example
///
/// ```
/// use rotaforge_core::Resident;
///
/// let chief = Resident::new("Jane", "Doe", 3).rising_chief();
/// assert_eq!(chief.to_string(), "Doe, Jane, year 3");
/// assert!(chief.is_rising_chief());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resident {
    id: ResidentId,
    first_name: String,
    last_name: String,
    year: u32,
    is_fellowship_applicant: bool,
    is_rising_chief: bool,
    specialty: String,
}

impl Resident {
    /// Creates a resident in the given program year with a fresh identity.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, year: u32) -> Self {
        Self {
            id: ResidentId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            year,
            is_fellowship_applicant: false,
            is_rising_chief: false,
            specialty: String::new(),
        }
    }

    /// Marks the resident as applying for a fellowship.
    pub fn fellowship_applicant(mut self) -> Self {
        self.is_fellowship_applicant = true;
        self
    }

    /// Marks the resident as a rising chief.
    pub fn rising_chief(mut self) -> Self {
        self.is_rising_chief = true;
        self
    }

    /// Sets the residency specialty (e.g. "internal medicine").
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    #[inline]
    pub fn id(&self) -> ResidentId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Program year, starting at 1.
    #[inline]
    pub fn year(&self) -> u32 {
        self.year
    }

    #[inline]
    pub fn is_fellowship_applicant(&self) -> bool {
        self.is_fellowship_applicant
    }

    #[inline]
    pub fn is_rising_chief(&self) -> bool {
        self.is_rising_chief
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    fn sort_key(&self) -> (&str, &str, std::cmp::Reverse<u32>, ResidentId) {
        (
            &self.last_name,
            &self.first_name,
            std::cmp::Reverse(self.year),
            self.id,
        )
    }
}

impl fmt::Debug for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resident")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("year", &self.year)
            .field("id", &self.id.to_string())
            .finish()
    }
}

impl fmt::Display for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, year {}", self.last_name, self.first_name, self.year)
    }
}

impl PartialEq for Resident {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Resident {}

impl Hash for Resident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Resident {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Resident {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
