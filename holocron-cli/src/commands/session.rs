use crate::{context::Context, storage::FileStorage};
use anyhow::{Result, bail};
use clap::Args;
use rpassword::prompt_password;
use shared::{
    models::Credentials,
    store::{SessionState, Store},
};
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, short, help = "Account email; prompted for when omitted")]
    pub email: Option<String>,

    #[arg(long, short, help = "Account password; prompted for when omitted")]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[command(flatten)]
    pub login: LoginArgs,

    #[arg(long, short, help = "First name shown in greetings")]
    pub first_name: Option<String>,
}

fn store(context: &Context) -> Store<SessionState, FileStorage> {
    Store::new(
        SessionState::rehydrate(&context.storage),
        context.storage.clone(),
    )
}

fn credentials(args: LoginArgs) -> Result<Credentials> {
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    if password.trim().is_empty() {
        bail!("password must not be empty");
    }
    Ok(Credentials::new(email, password))
}

pub async fn login(context: &Context, args: LoginArgs) -> Result<()> {
    let credentials = credentials(args)?;
    let store = store(context);
    let accepted = context.clients.auth.login(&store, &credentials).await?;
    report(&store, accepted, "login")
}

pub async fn signup(context: &Context, args: SignupArgs) -> Result<()> {
    let credentials = Credentials {
        first_name: args.first_name,
        ..credentials(args.login)?
    };
    let store = store(context);
    let accepted = context.clients.auth.signup(&store, &credentials).await?;
    report(&store, accepted, "signup")
}

pub fn logout(context: &Context) {
    let store = store(context);
    if !store.state().is_authenticated {
        println!("Not signed in");
        return;
    }
    context.clients.auth.logout(&store);
    println!("Signed out");
}

pub fn whoami(context: &Context) {
    if store(context).state().is_authenticated {
        println!(
            "Signed in; token stored at {}",
            context.storage.path().display()
        );
    } else {
        println!("Not signed in");
    }
}

fn report(store: &Store<SessionState, FileStorage>, accepted: bool, what: &str) -> Result<()> {
    if !accepted {
        bail!("{what} was refused by the server");
    }
    let state = store.state();
    match &state.user {
        Some(user) => println!(
            "Welcome {}",
            user.first_name.as_deref().unwrap_or(&user.email)
        ),
        None => println!("Welcome"),
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        bail!("input must not be empty");
    }
    Ok(trimmed)
}
