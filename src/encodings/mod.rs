//! Objects used to encode ADF semantics into SAT solvers.

mod acceptance_sat_encoding;
pub use acceptance_sat_encoding::AcceptanceSatEncoding;

mod propositional_mapping;
pub use propositional_mapping::PropositionalMapping;

mod refine_unequal_sat_encoding;
pub use refine_unequal_sat_encoding::RefineUnequalSatEncoding;

mod specs;
pub use specs::SatEncoding;

mod two_valued_model_sat_encoding;
pub use two_valued_model_sat_encoding::TwoValuedModelSatEncoding;
