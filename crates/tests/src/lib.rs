


#[cfg(test)]
mod chart_tests;

#[cfg(test)]
mod registry_tests;
