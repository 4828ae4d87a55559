use crate::{context::Context, storage::FileStorage};
use anyhow::{Context as _, Result, bail};
use clap::Subcommand;
use shared::{
    models::{Contact, ContactForm, ContactId, Load},
    store::{ContactsState, Store},
};

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// List contacts, creating the collection on first use
    List {
        #[arg(long, short, help = "Only show contacts with a field containing this text")]
        search: Option<String>,
    },
    /// Add a contact
    Add {
        #[arg(long, short, help = "Full name")]
        name: String,
        #[arg(long, short, default_value = "", help = "Email address")]
        email: String,
        #[arg(long, short, default_value = "", help = "Phone number")]
        phone: String,
        #[arg(long, short, default_value = "", help = "Postal address")]
        address: String,
    },
    /// Change fields of an existing contact
    Update {
        id: String,
        #[arg(long, short)]
        name: Option<String>,
        #[arg(long, short)]
        email: Option<String>,
        #[arg(long, short)]
        phone: Option<String>,
        #[arg(long, short)]
        address: Option<String>,
    },
    /// Delete a contact
    Delete { id: String },
}

pub async fn run(context: &Context, command: ContactsCommand) -> Result<()> {
    let store = Store::new(ContactsState::default(), context.storage.clone());
    let contacts = &context.clients.contacts;
    let user = context.clients.contacts_user.as_str();

    contacts
        .fetch_or_create(&store, user)
        .await
        .context("failed to reach the contacts service")?;
    if let Load::Failed(message) = &store.state().collection {
        bail!("{message}");
    }

    match command {
        ContactsCommand::List { search } => {
            let state = store.state();
            let listed = state.search(search.as_deref().unwrap_or_default());
            if listed.is_empty() {
                println!("No contacts");
            }
            for contact in listed {
                print_contact(contact);
            }
            return Ok(());
        }
        ContactsCommand::Add {
            name,
            email,
            phone,
            address,
        } => {
            let form = ContactForm {
                name,
                address,
                phone,
                email,
            };
            contacts.create_contact(&store, user, &form).await?;
        }
        ContactsCommand::Update {
            id,
            name,
            email,
            phone,
            address,
        } => {
            let id = ContactId::from(id.as_str());
            let mut form = existing(&store, &id)?;
            form.name = name.unwrap_or(form.name);
            form.email = email.unwrap_or(form.email);
            form.phone = phone.unwrap_or(form.phone);
            form.address = address.unwrap_or(form.address);
            contacts.update_contact(&store, user, id, &form).await?;
        }
        ContactsCommand::Delete { id } => {
            let id = ContactId::from(id.as_str());
            existing(&store, &id)?;
            contacts.delete_contact(&store, user, id).await?;
        }
    }

    let state = store.state();
    if let Some(notice) = &state.notice {
        bail!("{notice}");
    }
    println!("Done; {} contacts", state.contacts().len());
    Ok(())
}

fn existing(store: &Store<ContactsState, FileStorage>, id: &ContactId) -> Result<ContactForm> {
    store
        .state()
        .contacts()
        .iter()
        .find(|contact| &contact.id == id)
        .map(ContactForm::from)
        .with_context(|| format!("no contact with id {id}"))
}

fn print_contact(contact: &Contact) {
    println!("{:>5}  {}", contact.id, contact.name);
    for (label, value) in [
        ("email", &contact.email),
        ("phone", &contact.phone),
        ("address", &contact.address),
    ] {
        if !value.is_empty() {
            println!("       {label}: {value}");
        }
    }
}
