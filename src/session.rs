//! Interactive compute cycle. The session owns the measurement store, the two
//! raw input fields and the last outcome, and bumps a revision counter every
//! time a new row lands so history views know to re-query.

use tracing::{debug, warn};

use crate::bmi;
use crate::db::MeasurementStore;
use crate::error::{StorageError, ValidationError};
use crate::models::{BmiReading, Measurement};

/// Where the compute cycle currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing computed yet.
    Empty,
    /// The last compute attempt was rejected; no result is shown.
    InvalidInput(ValidationError),
    /// A reading is on screen. `saved` records whether the append succeeded.
    Computed { reading: BmiReading, saved: bool },
}

/// What a valid compute action produced.
#[derive(Debug)]
pub enum ComputeOutcome {
    Saved { reading: BmiReading, id: i64 },
    /// The reading stays displayed even though the row was not written.
    SaveFailed {
        reading: BmiReading,
        error: StorageError,
    },
}

impl ComputeOutcome {
    pub fn reading(&self) -> &BmiReading {
        match self {
            ComputeOutcome::Saved { reading, .. } => reading,
            ComputeOutcome::SaveFailed { reading, .. } => reading,
        }
    }
}

pub struct BmiSession {
    store: MeasurementStore,
    weight: String,
    height: String,
    state: SessionState,
    revision: u64,
}

impl BmiSession {
    /// Take ownership of the store and make sure its table exists. A schema
    /// failure is returned to the caller, which treats it as fatal.
    pub fn start(store: MeasurementStore) -> Result<Self, StorageError> {
        store.ensure_schema()?;
        Ok(Self {
            store,
            weight: String::new(),
            height: String::new(),
            state: SessionState::Empty,
            revision: 0,
        })
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight = text.into();
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height = text.into();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Reading currently on display, if any.
    pub fn reading(&self) -> Option<&BmiReading> {
        match &self.state {
            SessionState::Computed { reading, .. } => Some(reading),
            _ => None,
        }
    }

    /// Refresh token. Changes only after a successful append.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Validate the current inputs, compute the reading and try to persist it.
    /// Validation failures leave the inputs untouched and move to
    /// `InvalidInput`. A failed save still moves to `Computed`.
    pub fn compute(&mut self) -> Result<ComputeOutcome, ValidationError> {
        let reading = match bmi::evaluate(&self.weight, &self.height) {
            Ok(reading) => reading,
            Err(err) => {
                debug!(weight = %self.weight, height = %self.height, %err, "rejected input");
                self.state = SessionState::InvalidInput(err);
                return Err(err);
            }
        };

        self.state = SessionState::Computed {
            reading,
            saved: false,
        };

        match self
            .store
            .append(reading.bmi, reading.weight, reading.height)
        {
            Ok(id) => {
                self.state = SessionState::Computed {
                    reading,
                    saved: true,
                };
                self.revision += 1;
                Ok(ComputeOutcome::Saved { reading, id })
            }
            Err(error) => {
                warn!(%error, bmi = reading.bmi, "measurement was not saved");
                Ok(ComputeOutcome::SaveFailed { reading, error })
            }
        }
    }

    /// Full history, newest first.
    pub fn history(&self) -> Result<Vec<Measurement>, StorageError> {
        self.store.list_all()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::session_with_failing_writes;
    use crate::models::Category;

    fn session() -> BmiSession {
        BmiSession::start(MeasurementStore::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn starts_empty() {
        let session = session();
        assert_eq!(session.state(), &SessionState::Empty);
        assert!(session.reading().is_none());
        assert_eq!(session.revision(), 0);
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn valid_compute_saves_and_bumps_revision() {
        let mut session = session();
        session.set_weight("150");
        session.set_height("65");

        let outcome = session.compute().unwrap();
        assert!(matches!(outcome, ComputeOutcome::Saved { .. }));
        assert_eq!(outcome.reading().bmi, 25.0);
        assert_eq!(outcome.reading().category, Category::Healthy);
        assert_eq!(session.revision(), 1);

        let history = session.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].bmi, 25.0);
        assert_eq!(history[0].weight, 150.0);
        assert_eq!(history[0].height, 65.0);
    }

    #[test]
    fn invalid_weight_is_reported_before_height() {
        let mut session = session();
        session.set_weight("abc");
        session.set_height("-1");

        assert_eq!(
            session.compute().unwrap_err(),
            ValidationError::InvalidWeight
        );
        assert_eq!(
            session.state(),
            &SessionState::InvalidInput(ValidationError::InvalidWeight)
        );
        assert_eq!(session.weight(), "abc");
        assert_eq!(session.height(), "-1");
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn invalid_height_after_result_hides_reading() {
        let mut session = session();
        session.set_weight("140");
        session.set_height("68");
        session.compute().unwrap();
        assert!(session.reading().is_some());

        session.set_height("0");
        assert_eq!(
            session.compute().unwrap_err(),
            ValidationError::InvalidHeight
        );
        assert!(session.reading().is_none());
        assert_eq!(session.revision(), 1);
        assert_eq!(session.history().unwrap().len(), 1);
    }

    #[test]
    fn overflowing_reading_is_rejected_and_not_saved() {
        let mut session = session();
        session.set_weight("1e300");
        session.set_height("1e-300");

        assert_eq!(
            session.compute().unwrap_err(),
            ValidationError::InvalidHeight
        );
        assert!(session.reading().is_none());
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn failed_save_keeps_reading_on_screen() {
        let (_dir, mut session) = session_with_failing_writes();

        let outcome = session.compute().unwrap();
        assert!(matches!(
            outcome,
            ComputeOutcome::SaveFailed {
                error: StorageError::Insert(_),
                ..
            }
        ));
        assert_eq!(session.reading().map(|r| r.bmi), Some(25.0));
        assert!(matches!(
            session.state(),
            SessionState::Computed { saved: false, .. }
        ));
        assert_eq!(session.revision(), 0);
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn repeated_computes_stack_newest_first() {
        let mut session = session();
        for (weight, height) in [("120", "64"), ("180", "70"), ("250", "66")] {
            session.set_weight(weight);
            session.set_height(height);
            session.compute().unwrap();
        }

        assert_eq!(session.revision(), 3);
        let weights: Vec<f64> = session.history().unwrap().iter().map(|m| m.weight).collect();
        assert_eq!(weights, vec![250.0, 180.0, 120.0]);
    }
}
