// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Arabic (ar) catalog table.

pub(crate) const ENTRIES: &[(&str, &str)] = &[
	("app.name", "إدارة متجر الذهب"),
	("app.tagline", "المخزون والفواتير والمحاسبة لتجار المجوهرات"),
	("app.loading", "جارٍ التحميل..."),
	("app.version", "الإصدار {version}"),
	("nav.dashboard", "لوحة التحكم"),
	("nav.inventory", "المخزون"),
	("nav.invoices", "الفواتير"),
	("nav.customers", "العملاء"),
	("nav.accounting", "المحاسبة"),
	("nav.sms", "الرسائل النصية"),
	("nav.reports", "التقارير"),
	("nav.settings", "الإعدادات"),
	("nav.roles", "الأدوار والصلاحيات"),
	("nav.users", "المستخدمون"),
	("nav.cache", "إدارة الذاكرة المؤقتة"),
	("nav.logout", "تسجيل الخروج"),
	("nav.home", "الرئيسية"),
	("nav.back", "رجوع"),
	("nav.menu", "القائمة"),
	("common.save", "حفظ"),
	("common.cancel", "إلغاء"),
	("common.delete", "حذف"),
	("common.edit", "تعديل"),
	("common.add", "إضافة"),
	("common.create", "إنشاء"),
	("common.update", "تحديث"),
	("common.search", "بحث"),
	("common.filter", "تصفية"),
	("common.clear", "مسح"),
	("common.reset", "إعادة تعيين"),
	("common.close", "إغلاق"),
	("common.confirm", "تأكيد"),
	("common.yes", "نعم"),
	("common.no", "لا"),
	("common.actions", "الإجراءات"),
	("common.status", "الحالة"),
	("common.active", "نشط"),
	("common.inactive", "غير نشط"),
	("common.date", "التاريخ"),
	("common.from", "من"),
	("common.to", "إلى"),
	("common.total", "المجموع"),
	("common.amount", "المبلغ"),
	("common.description", "الوصف"),
	("common.name", "الاسم"),
	("common.phone", "الهاتف"),
	("common.email", "البريد الإلكتروني"),
	("common.address", "العنوان"),
	("common.notes", "ملاحظات"),
	("common.export", "تصدير"),
	("common.import", "استيراد"),
	("common.print", "طباعة"),
	("common.refresh", "تحديث البيانات"),
	("common.details", "التفاصيل"),
	("common.view", "عرض"),
	("common.select", "اختيار"),
	("common.all", "الكل"),
	("common.none", "لا شيء"),
	("common.loading", "جارٍ التحميل..."),
	("common.no_data", "لا توجد بيانات"),
	("common.error", "حدث خطأ"),
	("common.success", "تمت العملية بنجاح"),
	("common.required", "هذا الحقل مطلوب"),
	("common.previous", "السابق"),
	("common.next", "التالي"),
	("common.page_of", "الصفحة {page} من {pages}"),
	("common.items_selected", "تم تحديد {count} عنصر"),
	("common.confirm_delete", "هل أنت متأكد من حذف هذا العنصر؟"),
	("common.currency", "تومان"),
	("common.weight_grams", "{weight} غرام"),
	("auth.login", "تسجيل الدخول"),
	("auth.username", "اسم المستخدم"),
	("auth.password", "كلمة المرور"),
	("auth.remember_me", "تذكرني"),
	("auth.forgot_password", "هل نسيت كلمة المرور؟"),
	("auth.invalid_credentials", "اسم المستخدم أو كلمة المرور غير صحيحة"),
	("auth.session_expired", "انتهت صلاحية الجلسة. يرجى تسجيل الدخول مرة أخرى."),
	("auth.tenant", "المتجر"),
	("auth.select_tenant", "اختر متجرًا"),
	("auth.welcome", "مرحبًا، {name}"),
	("dashboard.title", "لوحة التحكم"),
	("dashboard.today_sales", "مبيعات اليوم"),
	("dashboard.monthly_sales", "المبيعات الشهرية"),
	("dashboard.gold_price", "سعر الذهب (عيار 18)"),
	("dashboard.inventory_value", "قيمة المخزون"),
	("dashboard.low_stock", "أصناف منخفضة المخزون"),
	("dashboard.recent_invoices", "أحدث الفواتير"),
	("dashboard.top_customers", "أفضل العملاء"),
	("dashboard.pending_payments", "المدفوعات المعلقة"),
	("dashboard.quick_actions", "إجراءات سريعة"),
	("inventory.title", "المخزون"),
	("inventory.add_item", "إضافة صنف"),
	("inventory.edit_item", "تعديل الصنف"),
	("inventory.item_code", "رمز الصنف"),
	("inventory.item_name", "اسم الصنف"),
	("inventory.category", "الفئة"),
	("inventory.karat", "العيار"),
	("inventory.weight", "الوزن"),
	("inventory.wage", "أجرة الصياغة"),
	("inventory.stone_weight", "وزن الحجر"),
	("inventory.quantity", "الكمية"),
	("inventory.in_stock", "متوفر"),
	("inventory.out_of_stock", "غير متوفر"),
	("inventory.barcode", "الباركود"),
	("inventory.supplier", "المورد"),
	("inventory.location", "الموقع"),
	("inventory.bulk_operations", "عمليات جماعية"),
	("inventory.bulk_update_price", "تحديث الأسعار"),
	("inventory.bulk_move", "نقل الأصناف"),
	("inventory.universal_search", "البحث بالرمز أو الاسم أو الباركود"),
	("inventory.stock_movement", "حركة المخزون"),
	("inventory.categories.rings", "خواتم"),
	("inventory.categories.necklaces", "قلائد"),
	("inventory.categories.bracelets", "أساور"),
	("inventory.categories.earrings", "أقراط"),
	("inventory.categories.coins", "عملات"),
	("inventory.categories.bullion", "سبائك"),
	("inventory.saved", "تم حفظ الصنف"),
	("inventory.deleted", "تم حذف الصنف"),
	("invoices.title", "الفواتير"),
	("invoices.new", "فاتورة جديدة"),
	("invoices.number", "رقم الفاتورة"),
	("invoices.customer", "العميل"),
	("invoices.issue_date", "تاريخ الإصدار"),
	("invoices.due_date", "تاريخ الاستحقاق"),
	("invoices.subtotal", "المجموع الفرعي"),
	("invoices.tax", "الضريبة"),
	("invoices.discount", "الخصم"),
	("invoices.grand_total", "الإجمالي النهائي"),
	("invoices.paid", "مدفوعة"),
	("invoices.unpaid", "غير مدفوعة"),
	("invoices.partially_paid", "مدفوعة جزئيًا"),
	("invoices.draft", "مسودة"),
	("invoices.cancelled", "ملغاة"),
	("invoices.line_items", "بنود الفاتورة"),
	("invoices.add_line", "إضافة بند"),
	("invoices.payment_method", "طريقة الدفع"),
	("invoices.cash", "نقدًا"),
	("invoices.card", "بطاقة"),
	("invoices.installments", "أقساط"),
	("invoices.print_invoice", "طباعة الفاتورة"),
	("invoices.created", "تم إنشاء الفاتورة {number}"),
	("customers.title", "العملاء"),
	("customers.add", "إضافة عميل"),
	("customers.national_id", "الرقم الوطني"),
	("customers.balance", "الرصيد"),
	("customers.purchase_history", "سجل المشتريات"),
	("customers.tags", "الوسوم"),
	("customers.birthday", "تاريخ الميلاد"),
	("customers.debtor", "مدين"),
	("customers.creditor", "دائن"),
	("accounting.title", "المحاسبة"),
	("accounting.chart_of_accounts", "دليل الحسابات"),
	("accounting.journal_entries", "قيود اليومية"),
	("accounting.new_entry", "قيد جديد"),
	("accounting.ledger", "دفتر الأستاذ العام"),
	("accounting.debit", "مدين"),
	("accounting.credit", "دائن"),
	("accounting.balance", "الرصيد"),
	("accounting.account", "الحساب"),
	("accounting.account_code", "رمز الحساب"),
	("accounting.trial_balance", "ميزان المراجعة"),
	("accounting.balance_sheet", "الميزانية العمومية"),
	("accounting.income_statement", "قائمة الدخل"),
	("accounting.unbalanced_entry", "يجب أن يتساوى المدين والدائن"),
	("accounting.posted", "مُرحَّل"),
	("accounting.cheques", "الشيكات"),
	("accounting.bank_accounts", "الحسابات المصرفية"),
	("accounting.fiscal_year", "السنة المالية"),
	("sms.title", "حملات الرسائل النصية"),
	("sms.new_campaign", "حملة جديدة"),
	("sms.message", "نص الرسالة"),
	("sms.recipients", "المستلمون"),
	("sms.send", "إرسال"),
	("sms.schedule", "جدولة"),
	("sms.templates", "القوالب"),
	("sms.sent", "مُرسلة"),
	("sms.failed", "فشلت"),
	("sms.pending", "قيد الانتظار"),
	("sms.credit", "رصيد الرسائل"),
	("sms.character_count", "{count} حرفًا"),
	("sms.birthday_greeting", "تهنئة عيد الميلاد"),
	("sms.history", "سجل الإرسال"),
	("rbac.title", "الأدوار والصلاحيات"),
	("rbac.roles", "الأدوار"),
	("rbac.permissions", "الصلاحيات"),
	("rbac.new_role", "دور جديد"),
	("rbac.role_name", "اسم الدور"),
	("rbac.assign_role", "تعيين دور"),
	("rbac.users", "المستخدمون"),
	("rbac.new_user", "مستخدم جديد"),
	("rbac.permission_denied", "ليس لديك صلاحية لتنفيذ هذا الإجراء"),
	("rbac.read", "قراءة"),
	("rbac.write", "كتابة"),
	("rbac.manage", "إدارة"),
	("rbac.admin", "مسؤول النظام"),
	("rbac.system_role", "دور النظام"),
	("reports.title", "التقارير"),
	("reports.sales", "تقرير المبيعات"),
	("reports.inventory", "تقرير المخزون"),
	("reports.profit_loss", "الأرباح والخسائر"),
	("reports.customers", "تقرير العملاء"),
	("reports.period", "الفترة"),
	("reports.daily", "يومي"),
	("reports.weekly", "أسبوعي"),
	("reports.monthly", "شهري"),
	("reports.yearly", "سنوي"),
	("reports.generate", "إنشاء التقرير"),
	("reports.analytics", "التحليلات"),
	("reports.chart", "الرسم البياني"),
	("reports.download_pdf", "تنزيل PDF"),
	("reports.download_excel", "تنزيل Excel"),
	("settings.title", "الإعدادات"),
	("settings.general", "عام"),
	("settings.language", "اللغة"),
	("settings.theme", "المظهر"),
	("settings.theme_light", "فاتح"),
	("settings.theme_dark", "داكن"),
	("settings.company", "معلومات الشركة"),
	("settings.gold_price_source", "مصدر سعر الذهب"),
	("settings.tax_rate", "نسبة الضريبة"),
	("settings.calendar", "التقويم"),
	("settings.calendar_jalali", "هجري شمسي"),
	("settings.calendar_gregorian", "ميلادي"),
	("settings.notifications", "الإشعارات"),
	("settings.backup", "النسخ الاحتياطي"),
	("settings.saved", "تم حفظ الإعدادات"),
	("cache.title", "إدارة الذاكرة المؤقتة"),
	("cache.keys", "المفاتيح المخزنة"),
	("cache.clear_all", "مسح الذاكرة المؤقتة بالكامل"),
	("cache.clear_confirm", "هل تريد مسح جميع البيانات المخزنة؟"),
	("cache.memory_usage", "استخدام الذاكرة"),
	("cache.hit_rate", "معدل الإصابة"),
	("cache.connected", "متصل"),
	("cache.disconnected", "غير متصل"),
	("cache.ttl", "مدة الصلاحية"),
	("cache.cleared", "تم مسح الذاكرة المؤقتة"),
	("language.english", "الإنجليزية"),
	("language.persian", "الفارسية"),
	("language.arabic", "العربية"),
	("language.select", "اختر اللغة"),
	("language.changed", "تم تغيير اللغة إلى {language}"),
];
