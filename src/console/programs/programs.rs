use crate::console::{
    handler::Dispatcher,
    programs::{arrays, digits, grids, misc},
};

pub fn build_programs() -> Dispatcher {
    let mut builder = Dispatcher::builder();

    builder = arrays::register(builder);
    builder = grids::register(builder);
    builder = digits::register(builder);
    builder = misc::register(builder);

    builder.build()
}
