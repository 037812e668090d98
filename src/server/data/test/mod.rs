mod blacklist;
mod multi_panel;
mod panel;
mod settings;
mod ticket;
