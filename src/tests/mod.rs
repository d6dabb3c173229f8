mod set;
mod util;
