//! Read-only access to the elements being validated.

/// Source of element state for the validator.
///
/// The validator never mutates anything it reads through this trait. An
/// implementation only needs to locate elements by selector and report their
/// current value and checked state.
pub trait ElementProvider {
    /// Cheap handle to one resolved element.
    type Handle: Copy;

    /// All elements currently matching `selector`, in document order.
    ///
    /// A selector the provider cannot interpret should resolve to no
    /// elements.
    fn resolve(&self, selector: &str) -> Vec<Self::Handle>;

    /// Current value of the element (text, or selected value for a select).
    fn read_value(&self, element: Self::Handle) -> Option<String>;

    /// Whether the element is currently checked.
    fn read_checked(&self, element: Self::Handle) -> bool;
}

impl<P: ElementProvider + ?Sized> ElementProvider for &P {
    type Handle = P::Handle;

    fn resolve(&self, selector: &str) -> Vec<Self::Handle> {
        (**self).resolve(selector)
    }

    fn read_value(&self, element: Self::Handle) -> Option<String> {
        (**self).read_value(element)
    }

    fn read_checked(&self, element: Self::Handle) -> bool {
        (**self).read_checked(element)
    }
}
