pub mod invitation_code;
