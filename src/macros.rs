/// Exports kernel functions to JavaScript under their own names.
///
/// Each entry `name(arg, ...)` generates a `#[wasm_bindgen]` shim
/// `js_<name>` that forwards its `f64` arguments to `name` unchanged.
/// `name` and `wasm_bindgen` must be in scope at the call site.
#[macro_export]
macro_rules! export_noise {
    ($($name:ident($($arg:ident),* $(,)?)),* $(,)?) => {
        paste::paste! {
            $(
                #[allow(clippy::too_many_arguments)]
                #[wasm_bindgen(js_name = $name)]
                pub fn [<js_ $name>]($($arg: f64),*) -> f64 {
                    $name($($arg),*)
                }
            )*
        }
    };
}
