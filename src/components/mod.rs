mod contact_link;
pub use contact_link::*;

mod education_card;
pub use education_card::*;

mod experience_card;
pub use experience_card::*;

mod icon;
pub use icon::*;

mod progress_bar;
pub use progress_bar::*;

mod project_card;
pub use project_card::*;

mod section_heading;
pub use section_heading::*;

mod skill_group;
pub use skill_group::*;

mod stat_badge;
pub use stat_badge::*;
