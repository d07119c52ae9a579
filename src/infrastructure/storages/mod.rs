pub mod http_put;
