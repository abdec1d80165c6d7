#[cfg(test)]
mod common;


#[cfg(test)]
mod page_host_tests;

#[cfg(test)]
mod shell_scenario_tests;
