/// `config_struct!` declares a configuration struct together with its
/// defaults, so field, type and default value live on one line.
///
/// # Example
/// ```
/// meteora_client::config_struct! {
///     pub struct RetryConfig {
///         attempts: u32 = 3,
///         backoff_ms: u64 = 250,
///     }
/// }
///
/// let config = RetryConfig::default();
/// assert_eq!(config.attempts, 3);
/// ```
///
/// Generates public fields, a `Default` impl built from the listed values,
/// and serde support with `#[serde(default)]` so partial files load.
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
