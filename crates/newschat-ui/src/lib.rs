pub mod state;
pub mod panels;

#[cfg(test)]
mod tests;
