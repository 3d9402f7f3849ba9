pub mod ngrok_publisher;
