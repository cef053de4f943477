mod footer;
mod marketing;
mod nav;
mod new_labs;
mod profile_completion;
mod protected_route;
mod spinner;

pub use footer::Footer;
pub use marketing::{ContentSection, CtaSection, HeroSection, StatsSection};
pub use nav::Navbar;
pub use new_labs::{LabCard, LabList, NewLabs};
pub use profile_completion::ProfileCompletion;
pub use protected_route::ProtectedRoute;
pub use spinner::Spinner;
