#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDestination {
    pub path: String,
    pub fid: String,
    pub devid: String,
}
