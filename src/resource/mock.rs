//! Mock resource for isolating the pager in tests.

use mockall::mock;

use crate::domain::sort::SortOrder;
use crate::resource::Resource;
use crate::resource::errors::ResourceResult;

mock! {
    pub PagerResource {}

    impl Resource for PagerResource {
        fn add_limit(&mut self, offset: usize, limit: usize);
        fn add_order(&mut self, column: &str, direction: SortOrder) -> ResourceResult<()>;
        fn calculate_found_rows(&mut self) -> ResourceResult<()>;
        fn total_rows(&self) -> usize;
    }
}
