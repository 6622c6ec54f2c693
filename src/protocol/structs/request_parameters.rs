/// Request parameters, stored url-encoded in insertion order.
///
/// Duplicate keys are allowed and sent as given. Metadata pairs are sent
/// after the ordinary pairs, using the `plugin.meta.keyN`/`plugin.meta.valueN`
/// convention with a `plugin.meta.keys=N` count in front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pub(crate) parameters: Vec<(String, String)>,
    pub(crate) meta_data: Vec<(String, String)>,
    pub(crate) parameters_length: usize,
}
