use kernel::KernelError;

/// Maps an infrastructure error onto the kernel taxonomy at the driver
/// boundary.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
