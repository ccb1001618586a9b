#[cfg(test)]
mod dns;
#[cfg(test)]
mod util;
