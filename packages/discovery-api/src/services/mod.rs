pub mod ticketmaster;

pub use ticketmaster::TicketmasterClient;
