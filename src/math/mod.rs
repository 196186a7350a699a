mod quadratic;

pub use quadratic::{first_root_at_or_above, has_solution};
