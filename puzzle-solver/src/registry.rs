//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::HashMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolverInfo {
    /// The puzzle year
    pub year: u16,
    /// The day number
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Registration happens once at process startup; the built registry is
/// immutable afterward, so the executor and benchmark adapter can share it
/// by reference without locking. Duplicate identities are rejected during
/// registration.
///
/// # Example
///
/// ```ignore
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register(2016, 3, 2, |input| { /* ... */ Ok(Box::new(/* solver */)) })
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: HashMap<(u16, u8), FactoryEntry>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// Returns an error if a solver is already registered for the given
    /// year-day combination.
    ///
    /// # Arguments
    /// * `year` - The puzzle year
    /// * `day` - The day number
    /// * `parts` - Number of parts the solver supports
    /// * `factory` - A function that takes input and returns a boxed DynSolver
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(
            (year, day),
            FactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
        }
        Ok(self)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, allowing
    /// selective registration by tags, year, day, or any other criteria.
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps (year, day) pairs to factory functions. Once built it cannot be
/// modified; lookup is by key, never by registration order.
pub struct SolverRegistry {
    entries: HashMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError::NotFound)` - No solver registered for this identity
    /// * `Err(SolverError::ParseError)` - The solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Check if a solver is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Get metadata for a specific solver
    pub fn info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entries.get(&(year, day)).map(|e| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Metadata for all registered solvers, sorted by (year, day)
    ///
    /// Sorted so that consumers iterating the catalogue produce
    /// deterministic output regardless of registration order.
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        let mut infos: Vec<SolverInfo> = self
            .entries
            .iter()
            .map(|(&(year, day), e)| SolverInfo {
                year,
                day,
                parts: e.parts,
            })
            .collect();
        infos.sort();
        infos.into_iter()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Type-erased interface with no associated types, so different solver
/// types can be collected in a single plugin container.
///
/// Any type implementing [`Solver`](crate::Solver) gets a blanket
/// implementation, enabling it to be used in the plugin system.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted via `inventory::submit!` next to each solution and collected
/// once at startup by [`RegistryBuilder::register_all_plugins`].
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2016,
///         day: 3,
///         solver: &Day3Solver,
///         tags: &["2016", "geometry"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g. "easy", "grid", "2016")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a registry builder
///
/// Creates the factory closure that parses input and wraps the result in a
/// `SolverInstance`.
///
/// # Example
///
/// ```
/// use puzzle_solver::{register_solver, ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
///
/// struct MySolver;
///
/// impl PuzzleParser for MySolver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MySolver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MySolver, 2016, 3);
/// let registry = builder.build();
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                |input: &str| {
                    Ok(Box::new($crate::SolverInstance::<$solver>::new(
                        $year, $day, input,
                    )?))
                },
            )
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::{PuzzleParser, Solver};

    struct SumSolver;

    impl PuzzleParser for SumSolver {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l}")))
                })
                .collect()
        }
    }

    impl Solver for SumSolver {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.iter().sum::<i64>().to_string()),
                2 => Ok(shared.iter().product::<i64>().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry_with_sum_solver() -> SolverRegistry {
        let mut builder = RegistryBuilder::new();
        register_solver!(builder, SumSolver, 2016, 3);
        builder.build()
    }

    #[test]
    fn create_and_solve() {
        let registry = registry_with_sum_solver();
        let mut solver = registry.create_solver(2016, 3, "1\n2\n3").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "6");
        assert_eq!(solver.solve(2).unwrap().answer, "6");
        assert_eq!(solver.parts(), 2);
    }

    #[test]
    fn lookup_missing_solver() {
        let registry = registry_with_sum_solver();
        let err = registry.create_solver(2015, 1, "").unwrap_err();
        assert!(matches!(err, SolverError::NotFound(2015, 1)));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let builder = RegistryBuilder::new()
            .register(2016, 3, 2, |input: &str| {
                Ok(Box::new(SolverInstance::<SumSolver>::new(2016, 3, input)?))
            })
            .unwrap();
        let err = builder
            .register(2016, 3, 2, |input: &str| {
                Ok(Box::new(SolverInstance::<SumSolver>::new(2016, 3, input)?))
            })
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateSolver(2016, 3)));
    }

    #[test]
    fn parse_failure_surfaces_as_solver_error() {
        let registry = registry_with_sum_solver();
        let err = registry.create_solver(2016, 3, "not a number").unwrap_err();
        assert!(matches!(err, SolverError::ParseError(_)));
    }

    #[test]
    fn iter_info_is_sorted() {
        let registry = RegistryBuilder::new()
            .register(2017, 1, 2, |input: &str| {
                Ok(Box::new(SolverInstance::<SumSolver>::new(2017, 1, input)?))
            })
            .unwrap()
            .register(2015, 1, 2, |input: &str| {
                Ok(Box::new(SolverInstance::<SumSolver>::new(2015, 1, input)?))
            })
            .unwrap()
            .build();

        let infos: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(infos, vec![(2015, 1), (2017, 1)]);
    }
}
