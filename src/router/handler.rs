use super::params::Params;

/// Something that can be invoked with the captures of a matched route.
pub trait Handler<R> {
    fn call(&self, params: Params<'_>) -> R;
}

pub type BoxHandler<R> = Box<dyn Fn(Params<'_>) -> R + Send + Sync>;

impl<F, R> Handler<R> for F
where
    F: Fn(Params<'_>) -> R,
{
    #[inline]
    fn call(&self, params: Params<'_>) -> R {
        (self)(params)
    }
}
