pub mod payment_intent;
